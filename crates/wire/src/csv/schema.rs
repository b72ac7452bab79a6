//! Column layout of the statistics store

/// Field delimiter
pub const DELIMITER: char = ';';

/// Quote character
pub const QUOTE: char = '"';

/// Terminator written after every record, header included
pub const ROW_TERMINATOR: &str = "\r\n";

/// Number of columns in every record
pub const COLUMN_COUNT: usize = 15;

/// Column names, in file order
pub const HEADER: [&str; COLUMN_COUNT] = [
    "Date",
    "ModelName",
    "Objective",
    "UserTime",
    "#Booleans",
    "#Branches",
    "#Conflicts",
    "SolverParameters",
    "SolverLog",
    "time1",
    "bound1",
    "objective1",
    "time2",
    "bound2",
    "objective2",
];
