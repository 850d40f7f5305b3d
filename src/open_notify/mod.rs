mod fetcher;
mod iss_now;

pub use fetcher::fetch_position;
