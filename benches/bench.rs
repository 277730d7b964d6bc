use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urispan::encoding::{decode_hex, encode_hex};
use urispan::{normalize_http_str, UriView};

criterion_group!(
    benches,
    bench_parse,
    bench_normalize,
    bench_decode_query,
    bench_enc,
    bench_dec,
);
criterion_main!(benches);

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse", |b| {
        b.iter(|| {
            let s = "https://dakka@www.blah.com:3000/search?q=%E6%B5%8B%E8%AF%95#fragment";
            let _ = black_box(UriView::new(black_box(s)));
        })
    });
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize", |b| {
        b.iter(|| {
            let s = "HTTPS://WWW.HELLO.COM:443/path/../this/./blah/%62%6c%6f%67/../end";
            let _ = black_box(normalize_http_str(black_box(s)));
        })
    });
}

fn bench_decode_query(c: &mut Criterion) {
    c.bench_function("decode_query", |b| {
        let uri = UriView::new(
            "http://nodejs.org:89/docs/url.html?payload1=true&payload2=false&test=1\
             &benchmark=3&foo=38.38.011.293&bar=1234834910480&test=19299&3992\
             &key=f5c65e1e98fe07e648249ad41e1cfdb0#test",
        );
        b.iter(|| {
            let _ = black_box(black_box(&uri).decode_query(false));
        })
    });
}

fn bench_enc(c: &mut Criterion) {
    c.bench_function("enc", |b| {
        b.iter(|| {
            let s = "/foo/this path has embedded spaces/test/node.js";
            let _ = black_box(encode_hex(black_box(s), true));
        })
    });
}

fn bench_dec(c: &mut Criterion) {
    c.bench_function("dec", |b| {
        b.iter(|| {
            let s = "https://www.netmeister.org/%62%6C%6F%67/%75%72%6C%73.%68%74%6D%6C";
            let _ = black_box(decode_hex(black_box(s), false));
        })
    });
}
