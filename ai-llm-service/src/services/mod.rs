pub mod gemini_service;
pub mod open_ai_service;

#[cfg(test)]
mod stub_http;
