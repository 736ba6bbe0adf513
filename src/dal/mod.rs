pub mod player_db;
