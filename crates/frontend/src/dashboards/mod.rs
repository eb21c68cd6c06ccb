pub mod d410_pool_workload;

pub use d410_pool_workload::ui::PoolBookingPage;
