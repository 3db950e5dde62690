use contracts::shared::config::Config;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Mobile navigation drawer
    pub menu_open: RwSignal<bool>,
    config: StoredValue<Config>,
}

impl AppGlobalContext {
    pub fn new(config: Config) -> Self {
        Self {
            menu_open: RwSignal::new(false),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> Config {
        self.config.get_value()
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    pub fn close_menu(&self) {
        self.menu_open.set(false);
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
