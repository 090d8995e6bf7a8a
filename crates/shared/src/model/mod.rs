mod de;

pub mod finance;
pub mod trip;
pub mod trip_service;
