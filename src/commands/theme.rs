//! Switch between the light and dark theme.

use crate::libs::{config::Config, messages::Message};
use crate::msg_success;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let mut config = Config::read()?;
    config.theme = config.theme.toggle();
    config.save()?;

    msg_success!(Message::ThemeSwitched(config.theme.as_str().to_string()));
    Ok(())
}
