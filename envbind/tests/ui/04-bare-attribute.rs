use envbind::Bindable;

#[derive(Bindable)]
pub struct Config {
    #[bind]
    a: String,
}

fn main() {}
