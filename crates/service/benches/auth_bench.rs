use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use service::auth::domain::LoginInput;
use service::auth::repository::mock::MockAuthRepository;
use service::auth::service::{AuthConfig, AuthService};

fn bench_login(c: &mut Criterion) {
    let repo = Arc::new(MockAuthRepository::default());
    let svc = AuthService::new(repo, AuthConfig { jwt_secret: "secret".into(), token_ttl_hours: 12 });

    // admin is created once, outside the measured loop
    let rt = tokio::runtime::Runtime::new().unwrap();
    let admin = rt.block_on(svc.set_password("hashnova", "Benchmark1")).unwrap();
    let token = svc.issue_token(&admin).unwrap();

    let input = || LoginInput { username: Some("hashnova".into()), password: Some("Benchmark1".into()) };

    c.bench_function("admin_login_verify", |b| {
        b.iter(|| rt.block_on(svc.login(input())).unwrap());
    });

    c.bench_function("admin_login_unknown_user", |b| {
        b.iter(|| {
            let miss = LoginInput { username: Some("ghost".into()), password: Some("Benchmark1".into()) };
            rt.block_on(svc.login(miss)).unwrap_err()
        });
    });

    c.bench_function("bearer_token_verify", |b| {
        b.iter(|| svc.verify_token(&token).unwrap());
    });
}

criterion_group!(benches, bench_login);
criterion_main!(benches);
