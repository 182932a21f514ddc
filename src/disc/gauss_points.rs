pub mod lobatto_points;
