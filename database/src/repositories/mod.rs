mod answers;
mod sales;

pub use answers::AnswerRepository;
pub use sales::SalesRepository;
