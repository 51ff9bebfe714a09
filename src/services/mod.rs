pub mod tournament;
