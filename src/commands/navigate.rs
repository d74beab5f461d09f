use crate::core::{
    command_init::{ViewerInit, ViewerOptions},
    error::Result,
    output::print_screen,
    viewer::{Viewer, ViewerEvent},
};
use rand::Rng;

pub fn execute_next(options: &ViewerOptions) -> Result<()> {
    execute_navigation(options, ViewerEvent::Next)
}

pub fn execute_prev(options: &ViewerOptions) -> Result<()> {
    execute_navigation(options, ViewerEvent::Previous)
}

/// Jump to a 1-based card number; invalid numbers leave the position alone
pub fn execute_jump(options: &ViewerOptions, number: &str) -> Result<()> {
    execute_navigation(options, ViewerEvent::SubmitJump(number.to_string()))
}

fn execute_navigation(options: &ViewerOptions, event: ViewerEvent) -> Result<()> {
    let mut viewer = ViewerInit::initialize(options)?;
    print_screen(&apply_and_render(&mut viewer, event));
    Ok(())
}

/// Apply a single event and render whatever screen results
pub(crate) fn apply_and_render<R: Rng>(viewer: &mut Viewer<R>, event: ViewerEvent) -> String {
    if !viewer.handle(event.clone()) {
        log::debug!("{event:?} left the viewer unchanged");
    }
    viewer.render()
}
