pub const MEASUREMENT_TABLE: &str = "CREATE TABLE IF NOT EXISTS measurements (
                                id INTEGER PRIMARY KEY AUTOINCREMENT,
                                humidity TEXT NOT NULL,
                                temperature TEXT NOT NULL,
                                perceived_temperature TEXT NOT NULL,
                                date TEXT NOT NULL
                            );";

pub const COUNTER_TABLE: &str = "CREATE TABLE IF NOT EXISTS submission_counter (
                                id INTEGER PRIMARY KEY,
                                threshold INTEGER NOT NULL,
                                current INTEGER NOT NULL
                            );";
