//! Static catalog of launchable applets used by the start menu and the desktop icon grid.

use crate::model::AppType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    pub app_type: AppType,
    pub launcher_label: &'static str,
    pub desktop_icon_label: &'static str,
    pub show_in_launcher: bool,
    pub show_on_desktop: bool,
}

const APP_REGISTRY: [AppDescriptor; 13] = [
    AppDescriptor {
        app_type: AppType::Tasks,
        launcher_label: "Tasks",
        desktop_icon_label: "Tasks",
        show_in_launcher: true,
        show_on_desktop: true,
    },
    AppDescriptor {
        app_type: AppType::Notes,
        launcher_label: "Notes",
        desktop_icon_label: "Notes",
        show_in_launcher: true,
        show_on_desktop: true,
    },
    AppDescriptor {
        app_type: AppType::Calculator,
        launcher_label: "Calculator",
        desktop_icon_label: "Calculator",
        show_in_launcher: true,
        show_on_desktop: true,
    },
    AppDescriptor {
        app_type: AppType::Calendar,
        launcher_label: "Calendar",
        desktop_icon_label: "Calendar",
        show_in_launcher: true,
        show_on_desktop: false,
    },
    AppDescriptor {
        app_type: AppType::Analytics,
        launcher_label: "Analytics",
        desktop_icon_label: "Stats",
        show_in_launcher: true,
        show_on_desktop: false,
    },
    AppDescriptor {
        app_type: AppType::Music,
        launcher_label: "Music Player",
        desktop_icon_label: "Music",
        show_in_launcher: true,
        show_on_desktop: false,
    },
    AppDescriptor {
        app_type: AppType::Pomodoro,
        launcher_label: "Pomodoro",
        desktop_icon_label: "Focus",
        show_in_launcher: true,
        show_on_desktop: false,
    },
    AppDescriptor {
        app_type: AppType::Clock,
        launcher_label: "Clock",
        desktop_icon_label: "Clock",
        show_in_launcher: true,
        show_on_desktop: false,
    },
    AppDescriptor {
        app_type: AppType::Stopwatch,
        launcher_label: "Stopwatch",
        desktop_icon_label: "Stopwatch",
        show_in_launcher: true,
        show_on_desktop: false,
    },
    AppDescriptor {
        app_type: AppType::Timer,
        launcher_label: "Timer",
        desktop_icon_label: "Timer",
        show_in_launcher: true,
        show_on_desktop: false,
    },
    AppDescriptor {
        app_type: AppType::Weather,
        launcher_label: "Weather",
        desktop_icon_label: "Weather",
        show_in_launcher: true,
        show_on_desktop: true,
    },
    AppDescriptor {
        app_type: AppType::Settings,
        launcher_label: "Settings",
        desktop_icon_label: "Settings",
        show_in_launcher: true,
        show_on_desktop: false,
    },
    AppDescriptor {
        app_type: AppType::FileManager,
        launcher_label: "File Manager",
        desktop_icon_label: "Files",
        show_in_launcher: true,
        show_on_desktop: true,
    },
];

pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

pub fn launcher_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_in_launcher)
        .collect()
}

pub fn desktop_icon_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_on_desktop)
        .collect()
}

pub fn app_descriptor(app_type: AppType) -> Option<&'static AppDescriptor> {
    app_registry()
        .iter()
        .find(|entry| entry.app_type == app_type)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_covers_every_app_type_once() {
        for app in AppType::ALL {
            let matches = app_registry()
                .iter()
                .filter(|entry| entry.app_type == app)
                .count();
            assert_eq!(matches, 1, "{app}");
        }
    }

    #[test]
    fn desktop_icons_are_a_subset_of_the_registry() {
        let icons: Vec<_> = desktop_icon_apps().into_iter().map(|a| a.app_type).collect();
        assert_eq!(
            icons,
            vec![
                AppType::Tasks,
                AppType::Notes,
                AppType::Calculator,
                AppType::Weather,
                AppType::FileManager,
            ]
        );
    }
}
