//! Weather screen - terminal host

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_components::centered_rect;
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weather_screen::action::Action;
use weather_screen::api::ForecastClient;
use weather_screen::components::permission_prompt::{PROMPT_HEIGHT, PROMPT_WIDTH};
use weather_screen::components::{
    Component, PermissionPrompt, PermissionPromptProps, WeatherScreen, WeatherScreenProps,
};
use weather_screen::config::{API_KEY_ENV, Config};
use weather_screen::effect::{Effect, Services};
use weather_screen::location;
use weather_screen::logging;
use weather_screen::reducer::reducer;
use weather_screen::state::{
    AppState, Coordinates, LOADING_ANIM_TICK_MS, PermissionPolicy, ScreenPhase, TempUnit,
};
use weather_screen::theme::Theme;

/// The theme follows the wall clock, so redraw at least once a minute.
const CLOCK_REFRESH_SECS: u64 = 60;

/// Terminal weather screen for the current location
#[derive(Parser, Debug)]
#[command(name = "weather-screen")]
#[command(about = "Current conditions, hourly strip and 7-day outlook for where you are")]
struct Args {
    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed latitude instead of the IP lookup
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Fixed longitude instead of the IP lookup
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Grant location access without asking
    #[arg(long)]
    allow_location: bool,

    /// Initial temperature unit
    #[arg(long, value_enum)]
    unit: Option<TempUnit>,

    /// Log file (defaults to the platform data directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum ScreenComponentId {
    Screen,
    Prompt,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum ScreenContext {
    Main,
    Prompt,
}

impl EventRoutingState<ScreenComponentId, ScreenContext> for AppState {
    fn focused(&self) -> Option<ScreenComponentId> {
        if self.phase == ScreenPhase::RequestingPermission {
            Some(ScreenComponentId::Prompt)
        } else {
            Some(ScreenComponentId::Screen)
        }
    }

    fn modal(&self) -> Option<ScreenComponentId> {
        if self.phase == ScreenPhase::RequestingPermission {
            Some(ScreenComponentId::Prompt)
        } else {
            None
        }
    }

    fn binding_context(&self, id: ScreenComponentId) -> ScreenContext {
        match id {
            ScreenComponentId::Screen => ScreenContext::Main,
            ScreenComponentId::Prompt => ScreenContext::Prompt,
        }
    }

    fn default_context(&self) -> ScreenContext {
        ScreenContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenvy::dotenv().ok();

    let log_path = logging::init(args.log_file.clone());

    let mut config = Config::load(args.config.as_deref()).map_err(io::Error::other)?;
    if let (Some(lat), Some(lon)) = (args.lat, args.lon) {
        config.location.latitude = Some(lat);
        config.location.longitude = Some(lon);
    }
    if args.allow_location {
        config.location.permission = PermissionPolicy::Granted;
    }
    if let Some(unit) = args.unit {
        config.display.unit = unit;
    }
    tracing::info!(log = ?log_path, permission = ?config.location.permission, "starting");

    let services = build_services(&config)?;

    let debug = DebugSession::new(args.debug);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let permission = config.location.permission;
    let display = config.display.clone();
    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::new(
                permission,
                display.unit,
                display.weekday_labels,
            ))
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions, services).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    tracing::info!("exiting");
    Ok(())
}

fn build_services(config: &Config) -> io::Result<Services> {
    let api_key = config.resolve_api_key(std::env::var(API_KEY_ENV).ok());
    if api_key.is_none() {
        tracing::warn!("no API key configured, forecast requests will fail");
    }
    let timeout = config.request_timeout();

    let forecast = ForecastClient::new(api_key, config.base_url.clone(), timeout)
        .map_err(io::Error::other)?;
    let fixed: Option<Coordinates> = config.fixed_coordinates();
    let locator = location::locator_for(fixed, &config.location.lookup_url, timeout)
        .map_err(io::Error::other)?;

    Ok(Services::new(forecast, locator))
}

struct ScreenUi {
    screen: WeatherScreen,
    prompt: PermissionPrompt,
}

impl ScreenUi {
    fn new() -> Self {
        Self {
            screen: WeatherScreen,
            prompt: PermissionPrompt::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<ScreenComponentId>,
    ) {
        let prompting = state.phase == ScreenPhase::RequestingPermission;
        event_ctx.set_component_area(ScreenComponentId::Screen, area);

        let props = WeatherScreenProps {
            state,
            theme: Theme::now(),
            is_focused: render_ctx.is_focused() && !prompting,
        };
        self.screen.render(frame, area, props);

        if prompting {
            let modal_area = centered_rect(PROMPT_WIDTH, PROMPT_HEIGHT, area);
            event_ctx.set_component_area(ScreenComponentId::Prompt, modal_area);
            let props = PermissionPromptProps {
                is_focused: render_ctx.is_focused(),
            };
            self.prompt.render(frame, area, props);
        } else {
            event_ctx
                .component_areas
                .remove(&ScreenComponentId::Prompt);
        }
    }

    fn handle_screen_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = WeatherScreenProps {
            state,
            theme: Theme::now(),
            is_focused: true,
        };
        let actions: Vec<_> = self
            .screen
            .handle_event(event, props)
            .into_iter()
            .collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }

    fn handle_prompt_event(&mut self, event: &EventKind) -> HandlerResponse<Action> {
        let props = PermissionPromptProps { is_focused: true };
        let actions: Vec<_> = self.prompt.handle_event(event, props).into_iter().collect();
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
    services: Services,
) -> io::Result<DebugRunOutput<AppState>> {
    let services = Arc::new(services);
    let ui = Rc::new(RefCell::new(ScreenUi::new()));
    let mut bus: EventBus<AppState, Action, ScreenComponentId, ScreenContext> = EventBus::new();
    let keybindings: Keybindings<ScreenContext> = Keybindings::new();

    let ui_screen = Rc::clone(&ui);
    bus.register(ScreenComponentId::Screen, move |event, state| {
        ui_screen
            .borrow_mut()
            .handle_screen_event(&event.kind, state)
    });

    let ui_prompt = Rc::clone(&ui);
    bus.register(ScreenComponentId::Prompt, move |event, _state| {
        ui_prompt.borrow_mut().handle_prompt_event(&event.kind)
    });

    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::PermissionRequest),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(LOADING_ANIM_TICK_MS),
                    || Action::Tick,
                );

                runtime.subscriptions().interval(
                    "clock",
                    Duration::from_secs(CLOCK_REFRESH_SECS),
                    || Action::Render,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, services.clone()),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, services: Arc<Services>) {
    let key = match effect {
        Effect::AcquireLocation => "location",
        Effect::FetchForecast { .. } => "forecast",
    };
    ctx.tasks()
        .spawn(key, async move { services.run(effect).await });
}
