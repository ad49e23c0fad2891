use crate::{
    app_state::AppState,
    ecs::plugin::ControllerSet,
    events::ActionTriggered,
    resources::CursorState,
    settings_types::Settings,
};
use bevy::prelude::*;
use game_input::{
    ActionStateTracker, ActionValue, GamepadConfig, InputAction, InputMappingContext,
    MappingContexts, TriggerEvent, gamepad_connection_system,
};
use tracing::{debug, error, info};

/// Name of the controller's own mapping context.
pub const DEFAULT_CONTEXT: &str = "aura";

/// The context begin play installs, built from the key binding settings.
#[derive(Resource, Debug, Clone)]
pub struct DefaultMappingContext(pub InputMappingContext);

/// Binding table from input actions to the trigger events that reach handlers.
#[derive(Resource, Default, Debug)]
pub struct InputComponent {
    bindings: Vec<(InputAction, TriggerEvent)>,
}

impl InputComponent {
    pub fn bind_action(&mut self, action: InputAction, trigger: TriggerEvent) {
        if !self.is_bound(action, trigger) {
            self.bindings.push((action, trigger));
        }
    }

    pub fn is_bound(&self, action: InputAction, trigger: TriggerEvent) -> bool {
        self.bindings.contains(&(action, trigger))
    }

    pub fn has_action(&self, action: InputAction) -> bool {
        self.bindings.iter().any(|(a, _)| *a == action)
    }
}

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<GamepadConfig>()
            .init_resource::<MappingContexts>()
            .init_resource::<ActionStateTracker>()
            .init_resource::<InputComponent>()
            .add_systems(Startup, (initialize_input_bindings, setup_input_component))
            .add_systems(OnEnter(AppState::InGame), add_default_mapping_context)
            .add_systems(
                Update,
                (gamepad_connection_system, dispatch_input_actions)
                    .chain()
                    .in_set(ControllerSet::Input),
            );
    }
}

fn initialize_input_bindings(
    mut commands: Commands,
    settings: Res<Settings>,
    mut gamepad_config: ResMut<GamepadConfig>,
) {
    let context = InputMappingContext::from_settings(DEFAULT_CONTEXT, &settings.key_bindings);
    commands.insert_resource(DefaultMappingContext(context));
    gamepad_config.dead_zone = settings.controls.gamepad_dead_zone;
}

fn setup_input_component(mut input_component: ResMut<InputComponent>) {
    input_component.bind_action(InputAction::Move, TriggerEvent::Triggered);
}

/// Begin play: the controller's context goes in at priority 0.
pub fn add_default_mapping_context(
    context: Option<Res<DefaultMappingContext>>,
    mut contexts: ResMut<MappingContexts>,
) {
    let Some(context) = context else {
        error!("No default mapping context configured, input will not be mapped");
        return;
    };

    contexts.add(context.0.clone(), 0);
    info!(context = context.0.name(), "Mapping context added");
}

/// Evaluates every bound action and writes one message per fired trigger.
pub fn dispatch_input_actions(
    keyboard: Res<ButtonInput<KeyCode>>,
    contexts: Res<MappingContexts>,
    input_component: Res<InputComponent>,
    gamepad_config: Res<GamepadConfig>,
    gamepads: Query<&Gamepad>,
    cursor_state: Res<CursorState>,
    mut tracker: ResMut<ActionStateTracker>,
    mut triggered: MessageWriter<ActionTriggered>,
) {
    if !cursor_state.input_mode.accepts_game_input() {
        return;
    }

    let gamepad = gamepad_config
        .primary_gamepad
        .and_then(|entity| gamepads.get(entity).ok());

    for &action in InputAction::all() {
        if !input_component.has_action(action) {
            continue;
        }

        let value = ActionValue::read(
            action,
            &contexts,
            &keyboard,
            gamepad,
            gamepad_config.dead_zone,
        );

        for trigger in tracker.advance(action, value) {
            if !input_component.is_bound(action, trigger) {
                continue;
            }
            if trigger != TriggerEvent::Triggered {
                debug!(?action, ?trigger, "Input action edge");
            }
            triggered.write(ActionTriggered {
                action,
                trigger,
                value,
            });
        }
    }
}
