fn main() {
    // Create a logger with the default configuration:
    // levels info/warn/error, colorized, info as the fallback
    let logger = linelog::default_logger();

    logger.info("server started");
    logger.warn("disk low");
    logger.error("connection lost");

    // Unrecognized severities are normalized to the default
    logger.log("debug", "this line logs at info");

    // Any value with a string conversion works as a message
    logger.info(42);
}
