use gpu_particles::run;

fn main() -> anyhow::Result<()> {
    run()
}
