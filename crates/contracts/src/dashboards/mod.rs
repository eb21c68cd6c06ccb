pub mod d410_pool_workload;
