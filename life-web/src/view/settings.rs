use web_sys::MouseEvent;
use yew::{classes, function_component, html, Callback, Properties};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    visible: bool,
    auto_run: bool,
}

impl Settings {
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn toggle_auto_run(&mut self) {
        self.auto_run = !self.auto_run;
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn auto_run(&self) -> bool {
        self.auto_run
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    ToggleVisible,
    ToggleAutoRun,
    ResetZoom,
    Step,
    Clear,
    Randomize,
    Faster,
    Slower,
}

#[derive(PartialEq, Properties)]
pub struct SettingsPanelProps {
    pub settings: Settings,
    pub generation: u64,
    pub tick_millis: u32,
    pub on_action: Callback<SettingsAction>,
}

#[function_component(SettingsPanel)]
pub fn settings_panel(props: &SettingsPanelProps) -> Html {
    let action = |action: SettingsAction| props.on_action.reform(move |_: MouseEvent| action);
    let menu = if props.settings.visible() {
        let auto_run = if props.settings.auto_run() {
            "auto-run-on"
        } else {
            "auto-run-off"
        };
        html! {
            <div id="settings">
                <button id="auto-zoom" title="Fit to window"
                    onclick={action(SettingsAction::ResetZoom)} />
                <button id="auto-run" class={classes!(auto_run)} title="Run"
                    onclick={action(SettingsAction::ToggleAutoRun)} />
                <button id="step" title="Step" onclick={action(SettingsAction::Step)}>
                    { "Step" }
                </button>
                <button id="clear" title="Clear" onclick={action(SettingsAction::Clear)}>
                    { "Clear" }
                </button>
                <button id="randomize" title="Randomize"
                    onclick={action(SettingsAction::Randomize)}>
                    { "Randomize" }
                </button>
                <button id="slower" title="Slower" onclick={action(SettingsAction::Slower)}>
                    { "-" }
                </button>
                <span id="tick-millis">{ format!("{} ms", props.tick_millis) }</span>
                <button id="faster" title="Faster" onclick={action(SettingsAction::Faster)}>
                    { "+" }
                </button>
                <span id="generation">{ format!("generation {}", props.generation) }</span>
            </div>
        }
    } else {
        html! {}
    };
    html! {
        <>
            <button id="toggle-settings" onclick={action(SettingsAction::ToggleVisible)} />
            { menu }
        </>
    }
}
