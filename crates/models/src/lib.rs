pub mod db;
pub mod docs;
pub mod status;

pub mod company_owned_services;
pub mod debt_recovery_company;
pub mod recovery_officer;
pub mod recovery_officer_rtoms;
pub mod rtom;
pub mod service_type;
