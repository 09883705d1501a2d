use super::model::FilteredDataset;
use super::summary::{
    at_risk, group_averages, kpi_summary, subject_averages, AtRiskRow, GroupAverages, GroupBy,
    KpiSummary, SubjectAverages,
};

/// Every aggregate the views need, computed from one filtered dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub kpi: KpiSummary,
    pub subject_averages: Option<SubjectAverages>,
    pub by_gender: Vec<GroupAverages>,
    pub by_parental_education: Vec<GroupAverages>,
    pub at_risk: Vec<AtRiskRow>,
}

impl Report {
    pub fn build(filtered: &FilteredDataset) -> Self {
        Report {
            kpi: kpi_summary(filtered),
            subject_averages: subject_averages(filtered),
            by_gender: group_averages(filtered, GroupBy::Gender),
            by_parental_education: group_averages(filtered, GroupBy::ParentalEducation),
            at_risk: at_risk(filtered),
        }
    }
}
