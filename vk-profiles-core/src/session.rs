use crate::{dispatch::Simulation, error::SimulationError};
use once_cell::sync::OnceCell;

/// Holds the simulation of a process once it has been loaded.
///
/// The loader runs at most once, on the first call that needs it. A failed
/// load leaves the slot empty, so a later call may try again.
#[derive(Debug, Default)]
pub struct SessionSlot {
    cell: OnceCell<Simulation>,
}

impl SessionSlot {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub fn get(&self) -> Option<&Simulation> {
        self.cell.get()
    }

    pub fn get_or_init(&self, init: impl FnOnce() -> Simulation) -> &Simulation {
        self.cell.get_or_init(init)
    }

    pub fn get_or_try_init(
        &self,
        init: impl FnOnce() -> Result<Simulation, SimulationError>,
    ) -> Result<&Simulation, SimulationError> {
        self.cell.get_or_try_init(|| {
            let simulation = init();
            if let Err(ref e) = simulation {
                log::error!("Unable to load the profile simulation: {}", e);
            }
            simulation
        })
    }
}
