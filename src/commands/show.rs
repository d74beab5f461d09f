use crate::core::{
    command_init::{ViewerInit, ViewerOptions},
    error::Result,
    output::print_screen,
};

/// Print the card at the stored position without moving
pub fn execute_show(options: &ViewerOptions) -> Result<()> {
    let mut viewer = ViewerInit::initialize(options)?;
    print_screen(&viewer.render());
    Ok(())
}
