//! Criterion benchmarks for u-species population operations.
//!
//! Uses a synthetic Sphere chromosome with inline strategies to measure
//! pure engine overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use futures::executor::block_on;
use rand::Rng;
use std::future::Future;
use u_species::population::{Chromosome, Population, PopulationConfig};

// ===========================================================================
// Sphere chromosome: minimize sum(x_i^2)
// ===========================================================================

#[derive(Clone)]
struct Sphere {
    genes: Vec<f64>,
    fitness: Option<f64>,
}

impl Chromosome for Sphere {
    type Fitness = f64;
    fn fitness(&self) -> Option<f64> {
        self.fitness
    }
    fn set_fitness(&mut self, f: f64) {
        self.fitness = Some(f);
    }
}

fn random_sphere(dim: usize) -> impl Fn() -> std::future::Ready<anyhow::Result<Sphere>> {
    move || {
        let mut rng = rand::rng();
        let genes = (0..dim).map(|_| rng.random_range(-5.0..5.0)).collect();
        std::future::ready(Ok(Sphere {
            genes,
            fitness: None,
        }))
    }
}

fn sphere_fitness(s: &Sphere) -> impl Future<Output = anyhow::Result<f64>> {
    let f: f64 = s.genes.iter().map(|x| x * x).sum();
    async move { anyhow::Ok(f) }
}

fn one_point(p1: &Sphere, p2: &Sphere) -> impl Future<Output = anyhow::Result<Sphere>> {
    let point = rand::rng().random_range(0..p1.genes.len());
    let mut child = p1.clone();
    child.genes[point..].copy_from_slice(&p2.genes[point..]);
    child.fitness = None;
    async move { anyhow::Ok(child) }
}

fn perturb(s: &Sphere) -> impl Future<Output = anyhow::Result<Sphere>> {
    let mut rng = rand::rng();
    let mut mutated = s.clone();
    let i = rng.random_range(0..mutated.genes.len());
    mutated.genes[i] += rng.random_range(-0.5..0.5);
    mutated.fitness = None;
    async move { anyhow::Ok(mutated) }
}

fn evaluated_population(dim: usize, size: usize) -> Population<Sphere> {
    let config = PopulationConfig {
        population_size: size,
        minimize_fitness: true,
        seed: Some(42),
        ..PopulationConfig::default()
    };
    let mut population = Population::new(config).expect("valid config");
    block_on(population.seed(random_sphere(dim))).expect("seed");
    block_on(population.calculate_fitness(sphere_fitness)).expect("fitness");
    population
}

fn bench_cull(c: &mut Criterion) {
    let mut group = c.benchmark_group("cull");
    group.sample_size(20);

    for size in [100usize, 1_000, 10_000] {
        let population = evaluated_population(10, size);
        let members = population.into_members();
        group.bench_with_input(BenchmarkId::from_parameter(size), &members, |b, members| {
            b.iter(|| {
                let config = PopulationConfig {
                    population_size: size,
                    cull_percentage: 50.0,
                    minimize_fitness: true,
                    ..PopulationConfig::default()
                };
                let mut population = Population::new(config).expect("valid config");
                for member in members.iter().cloned() {
                    population.add_member(member);
                }
                black_box(population.cull())
            })
        });
    }
    group.finish();
}

fn bench_generation_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation_cycle");
    group.sample_size(10);

    for (dim, size) in [(10usize, 100usize), (50, 500)] {
        group.bench_with_input(
            BenchmarkId::new(format!("d{}_p{}", dim, size), size),
            &(dim, size),
            |b, &(dim, size)| {
                let mut population = evaluated_population(dim, size);
                b.iter(|| {
                    block_on(async {
                        population.cull();
                        population.fill_by_breeding(one_point).await?;
                        population.mutate(perturb, 0.1).await?;
                        population.calculate_fitness(sphere_fitness).await?;
                        population.increment_generation();
                        Ok::<_, u_species::population::PopulationError>(())
                    })
                    .expect("cycle");
                    black_box(population.fittest_chromosome().map(|s| s.fitness))
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_cull, bench_generation_cycle);
criterion_main!(benches);
