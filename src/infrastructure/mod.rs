pub mod file_repo;
