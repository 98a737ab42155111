// src/main.rs
use std::env;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

fn pick_renderer() -> eframe::Renderer {
    match env::var("REELGRID_RENDERER").as_deref() {
        Ok("glow") => eframe::Renderer::Glow,
        Ok("wgpu") => eframe::Renderer::Wgpu,
        _ => {
            // Default: Windows = WGPU (DX12), Others = Glow (GL)
            #[cfg(target_os = "windows")]
            { eframe::Renderer::Wgpu }
            #[cfg(not(target_os = "windows"))]
            { eframe::Renderer::Glow }
        }
    }
}

fn main() -> eframe::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    // Optional deep link, e.g. `reelgrid "detail?id=603"` or `reelgrid "search?query=batman&page=2"`.
    let start_route = env::args().nth(1).map(|arg| {
        reelgrid::app::nav::Route::parse_arg(&arg).unwrap_or_else(|e| {
            warn!("bad start route `{arg}`: {e}");
            reelgrid::app::nav::Route::blocked(&e)
        })
    });

    let options = eframe::NativeOptions {
        renderer: pick_renderer(),
        multisampling: 0,
        ..Default::default()
    };

    match eframe::run_native(
        "Reelgrid",
        options,
        Box::new(move |_cc| Ok(Box::new(reelgrid::app::App::with_start_route(start_route)))),
    ) {
        Ok(_) => Ok(()),
        Err(e) => {
            error!("eframe failed to start: {e:?}");
            error!("Hint: on WSL use X/Wayland; try REELGRID_RENDERER=wgpu or glow.");
            Err(e)
        }
    }
}
