use expense_repo::expense_repo::NewExpense;
use fake::faker::lorem::en::{Sentence, Words};
use fake::Fake;
use rand::seq::SliceRandom;

trait Generator<T> {
    fn gen(&mut self) -> T;
}

struct Predefined<T> {
    values: Vec<T>,
    current_pos: usize,
}

impl<T> Predefined<T> {
    fn boxed(values: Vec<T>) -> Box<Predefined<T>> {
        Box::new(Predefined {
            values,
            current_pos: 0,
        })
    }
}

impl<T: Clone> Generator<T> for Predefined<T> {
    fn gen(&mut self) -> T {
        let v = self.values[self.current_pos].clone();
        self.current_pos += 1;
        v
    }
}

struct RandomSample<T> {
    values: Vec<T>,
}

impl<T> RandomSample<T> {
    fn boxed(values: Vec<T>) -> Box<RandomSample<T>> {
        Box::new(RandomSample { values })
    }
}

impl<T: Clone> Generator<T> for RandomSample<T> {
    fn gen(&mut self) -> T {
        self.values.choose(&mut rand::thread_rng()).unwrap().clone()
    }
}

struct FakeNote;

impl Generator<String> for FakeNote {
    fn gen(&mut self) -> String {
        Sentence(3..8).fake()
    }
}

struct FakeAmount;

impl Generator<i32> for FakeAmount {
    fn gen(&mut self) -> i32 {
        rand::Rng::gen_range(&mut rand::thread_rng(), 1..10_000)
    }
}

struct FakeTags;

impl Generator<Vec<String>> for FakeTags {
    fn gen(&mut self) -> Vec<String> {
        Words(1..4).fake()
    }
}

pub struct NewExpenseGenerator {
    title_gen: Box<dyn Generator<String>>,
    amnt_gen: Box<dyn Generator<i32>>,
    note_gen: Box<dyn Generator<String>>,
    tag_gen: Box<dyn Generator<Vec<String>>>,
}

#[allow(dead_code)]
impl NewExpenseGenerator {
    pub fn with_titles(mut self, titles: Vec<&str>) -> NewExpenseGenerator {
        let titles = titles.into_iter().map(|s| s.to_string()).collect();
        self.title_gen = Predefined::boxed(titles);
        self
    }

    pub fn with_amounts(mut self, amounts: Vec<i32>) -> NewExpenseGenerator {
        self.amnt_gen = Predefined::boxed(amounts);
        self
    }

    pub fn with_tags(mut self, tags: Vec<Vec<&str>>) -> NewExpenseGenerator {
        let tags = tags
            .into_iter()
            .map(|t| t.into_iter().map(|s| s.to_string()).collect())
            .collect();
        self.tag_gen = Predefined::boxed(tags);
        self
    }

    pub fn generate(&mut self) -> NewExpense {
        NewExpense::new(
            self.title_gen.gen(),
            self.amnt_gen.gen(),
            self.note_gen.gen(),
            self.tag_gen.gen(),
        )
    }

    pub fn generate_many(&mut self, count: usize) -> Vec<NewExpense> {
        (0..count).map(|_| self.generate()).collect()
    }
}

impl Default for NewExpenseGenerator {
    fn default() -> Self {
        NewExpenseGenerator {
            title_gen: RandomSample::boxed(vec![
                "strawberry smoothie".to_string(),
                "apple smoothie".to_string(),
                "bus ticket".to_string(),
                "groceries".to_string(),
            ]),
            amnt_gen: Box::new(FakeAmount),
            note_gen: Box::new(FakeNote),
            tag_gen: Box::new(FakeTags),
        }
    }
}
