pub mod answer;
pub mod sales;

pub use answer::{normalize_recommendations, AnswerRecord, SaveRecord};
pub use sales::{
    truncate_average, CafeCountRow, CafeRatioRow, MenuPriceRow, MonthlyAvgRow, PopularMenuRow,
    SalesSummaryRow,
};
