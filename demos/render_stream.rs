use docstream_render::{DocStream, RenderStrategy, render_default};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let s = include_str!("../tests/data/annotated_record.json");
    let stream: DocStream<String> = DocStream::from_json(s)?;

    for strategy in RenderStrategy::ALL {
        let out = strategy.render_to_string(stream.clone());
        println!("{strategy:?}: {} bytes", out.len());
    }

    render_default(stream)?;
    println!();
    Ok(())
}
