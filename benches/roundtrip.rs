//! Serialization round-trip benchmarks over synthetic documents.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use omexml::prelude::*;
use omexml::primitives::UnitsTime;

/// Build a document with `images` images, each with 4 channels and 32
/// plane records.
fn build_document(images: usize) -> OmeXmlMetadata {
    let mut store = OmeXmlMetadata::new();
    store.set_creator("omexml bench");
    for image in 0..images {
        store.set_image_id(&lsid("Image", image), image);
        store.set_image_name(format!("stack_{image}"), image);
        store.set_pixels_id(&lsid("Pixels", image), image);
        store.set_pixels_size_x(2048, image);
        store.set_pixels_size_y(2048, image);
        store.set_pixels_size_z(8, image);
        store.set_pixels_size_c(4, image);
        store.set_pixels_physical_size_x(Length::micrometers(0.1625), image);
        for channel in 0..4 {
            store.set_channel_id(&lsid("Channel", format!("{image}:{channel}")), image, channel);
            store.set_channel_name(format!("ch{channel}"), image, channel);
        }
        for plane in 0..32 {
            store.set_plane_the_z((plane % 8) as u32, image, plane);
            store.set_plane_the_c((plane / 8) as u32, image, plane);
            store.set_plane_delta_t(Time::new(plane as f64 * 0.5, UnitsTime::Second), image, plane);
        }
    }
    store
}

fn bench_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_document");
    for images in [1usize, 10, 100] {
        let store = build_document(images);
        group.throughput(Throughput::Elements(images as u64));
        group.bench_with_input(BenchmarkId::from_parameter(images), &store, |b, store| {
            b.iter(|| store.to_xml().expect("serialize"));
        });
    }
    group.finish();
}

fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_document");
    for images in [1usize, 10, 100] {
        let xml = build_document(images).to_xml().expect("serialize");
        group.throughput(Throughput::Bytes(xml.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(images), &xml, |b, xml| {
            b.iter(|| read_document_str(xml).expect("parse"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_write, bench_read);
criterion_main!(benches);
