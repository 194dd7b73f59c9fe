fn main() -> anyhow::Result<()> {
    zsh_compgen::cli::run()
}
