pub mod at_risk;
pub mod overview;
pub mod panels;
pub mod plot;
pub mod trends;
