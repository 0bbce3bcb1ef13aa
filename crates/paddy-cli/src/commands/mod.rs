pub mod check_rule;
pub mod diagnose;
pub mod diseases;
pub mod dispatch;
pub mod lint;
pub mod rules;
pub mod symptoms;
