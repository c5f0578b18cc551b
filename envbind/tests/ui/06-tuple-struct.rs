use envbind::Bindable;

#[derive(Bindable)]
pub struct Config(String);

fn main() {}
