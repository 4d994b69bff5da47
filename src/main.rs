use env_logger::Env;
use space_debris::audio::SoundDriver;
use space_debris::game::assets::AssetBundle;
use space_debris::game::handler::DebrisShooter;
use space_debris::window;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let sound_driver = match SoundDriver::try_create() {
        Ok(driver) => driver,
        Err(err) => {
            log::error!("Could not initialize audio: {}", err);
            std::process::exit(-1);
        }
    };

    // failures are already logged by the loader
    let assets = match AssetBundle::load(".") {
        Ok(assets) => assets,
        Err(err) => {
            log::error!("Could not load {}, giving up", err.path().display());
            std::process::exit(-1);
        }
    };

    window::start(DebrisShooter::new(assets), Some(sound_driver));
}
