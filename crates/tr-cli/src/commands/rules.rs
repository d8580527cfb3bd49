use super::GameOptions;

pub fn run(options: &GameOptions) -> Result<(), String> {
    let config = options.to_config()?;
    let rules = config.theme.theme().rules(
        config.fifty_threshold(),
        config.call_threshold(),
        config.time_limit,
    );
    println!("{rules}");
    Ok(())
}
