use gray_filter::image::RgbaBuffer;
use gray_filter::GrayFilter;

fn main() {
    // Demo stub: fills a fake scanned page with light-gray noise and runs
    // the filter once
    let w = 640usize;
    let h = 480usize;
    let mut input = RgbaBuffer::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let v = 200 + ((x + y) % 16) as u8;
            input.set_pixel(x, y, [v, v, v, 255]);
        }
    }
    let mut output = RgbaBuffer::new(w, h);

    let filter = GrayFilter::default();
    let report = filter.process(&input.as_view(), &mut output.as_view_mut());
    println!(
        "cleared={}/{} latency_ms={:.3}",
        report.tiles_cleared, report.tiles_visited, report.latency_ms
    );
}
