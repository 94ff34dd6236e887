/// Employee workflow service
pub mod employee_service;
