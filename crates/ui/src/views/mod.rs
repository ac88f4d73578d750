mod assessment;
mod home;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use assessment::{AssessmentFlow, AssessmentView};
pub use home::HomeView;
