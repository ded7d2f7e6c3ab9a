pub mod options_reader;
