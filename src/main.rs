use liftbank::messaging::SimHandle;
use liftbank::{init, input, print, render, scenario, sim};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let startup = match init::parse_args(&args) {
        Ok(startup) => startup,
        Err(e) => {
            print::err(format!("Invalid configuration: {}", e));
            print::info(
                "Usage: liftbank [<floors> <cars>] [scenario::<path>] [print_<cat>::false] \
                 [debug::on]"
                    .to_string(),
            );
            return;
        }
    };

    // Scenario scripts are loaded before any simulation state exists.
    let script = match &startup.scenario {
        Some(path) => match scenario::load(path) {
            Ok(script) => Some(script),
            Err(e) => {
                print::err(format!("{:#}", e));
                return;
            }
        },
        None => None,
    };

    print::info(format!(
        "Starting lift bank: {} floors, {} cars",
        startup.config.num_floors, startup.config.num_cars
    ));

    let (handle, core_task) = sim::start(startup.config);
    let SimHandle {
        press_tx,
        ui_rx,
        state_rx,
    } = handle;

    /* ----------- Renderer task: owns all visual output ----------- */
    let render_task = tokio::spawn(render::run_console(ui_rx, state_rx));

    /* ----------- Press source: scenario script or stdin ----------- */
    match script {
        Some(script) => {
            tokio::spawn(scenario::play(script, press_tx));
        }
        None => {
            print::info("Interactive mode. Type '<floor> [call|up|down]' and press enter".to_string());
            let stdin_rx = input::spawn_stdin_reader();
            tokio::spawn(input::bridge(stdin_rx, press_tx));
        }
    }

    let _ = core_task.await;
    let _ = render_task.await;
    print::ok("Simulation finished".to_string());
}
