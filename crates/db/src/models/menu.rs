//! Weekly menu (singleton). The value types live in `dineflow_core::menu`.

pub use dineflow_core::menu::{DayOfWeek, MenuItem, WeeklyMenu};

use crate::entity::SingletonEntity;
use crate::seed;

impl SingletonEntity for WeeklyMenu {
    const NAME: &'static str = "menu";

    fn seed_data() -> Option<Self> {
        Some(seed::menu())
    }
}
