use anyhow::Result;
use dotenvy::dotenv;
use std::io::Write;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use veloce_fleet::config::EnvironmentConfig;
use veloce_fleet::controllers::ShellController;
use veloce_fleet::render::render;
use veloce_fleet::repositories::FleetRepository;
use veloce_fleet::state::{reduce, Action, ShellState};

fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging (stderr, stdout queda para la vista)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    info!("🚗 Veloce Fleet - Dashboard de flota");

    let config = match EnvironmentConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Error de configuración: {}", e);
            return Err(e.into());
        }
    };
    info!("⚙️  Entorno: {}", config.environment);
    if config.is_development() {
        info!("🛠️  Modo desarrollo: datos mock embebidos, fecha de hoy {}", config.today);
    }

    let repository = FleetRepository::seeded()?;
    info!(
        "✅ Datos mock cargados: {} vehículos, {} intervenciones",
        repository.vehicles().len(),
        repository.interventions().len()
    );

    // El argumento de línea de comandos tiene prioridad sobre FLEET_VIEW
    let requested = std::env::args().nth(1).unwrap_or_else(|| config.initial_view.clone());
    let state = reduce(ShellState::default(), Action::NavigateTo(requested));
    info!("🧭 Vista activa: {}", state.active_view.id());

    let page = ShellController::new(&repository, &config).page(&state);
    let output = render(&page, config.output_format)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output)?;
    stdout.flush()?;

    Ok(())
}
