use block_mine::components::app::App;

fn main() {
    block_mine::util::init_logging(log::LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
