pub mod dto;
pub mod order_service;
