use std::collections::HashMap;

use colored::Color;
use linelog::{LevelColor, Logger, LoggerConfig};

fn main() {
    // Syslog-flavored level set with its own color map. Labels pad to the
    // longest name, so output stays columnar.
    let config = LoggerConfig {
        loglevel: "notice".to_string(),
        colorize: true,
        levels: vec![
            "notice".to_string(),
            "alert".to_string(),
            "emergency".to_string(),
        ],
        colors: HashMap::from([
            ("notice".to_string(), LevelColor(Color::Cyan)),
            ("alert".to_string(), LevelColor(Color::Yellow)),
            ("emergency".to_string(), LevelColor(Color::BrightRed)),
        ]),
    };

    let logger = Logger::new(config).expect("config is valid");

    logger.log("notice", "rotation complete");
    logger.log("alert", "queue depth above threshold");
    logger.log("emergency", "primary down");

    // Not in the level set, lands on notice
    logger.log("info", "normalized to the default level");
}
