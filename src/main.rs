use clap::Parser;
use sticker_cube::config::Config;
use sticker_cube::terminal::App;
use sticker_cube::Cube;

fn main() -> std::io::Result<()> {
    pretty_env_logger::init();
    let config = Config::parse();

    if config.plain {
        let mut cube = Cube::new();
        let mut rng = config.rng();

        println!("Initial Cube:\n{}", cube);

        cube.scramble_with(config.scramble_length, &mut rng);
        println!("Scrambled Cube ({}):\n{}", cube.history().notation_tail(usize::MAX), cube);

        let solution = cube.inverse_sequence();
        println!("Reversing {} moves", solution.len());

        for item in solution {
            cube.step_solve();
            println!("{}\n{}\n", item, cube);
        }
        return Ok(());
    }

    App::new(&config).run()
}
