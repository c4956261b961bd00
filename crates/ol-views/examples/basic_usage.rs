use ol_views::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // RUST_LOG=ol_views=debug shows each build step
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Optimal-learning request factory example");

    let request = json!({
        "domain_info": {
            "domain_type": "tensor_product",
            "dim": 2,
            "domain_bounds": [{"min": 0.0, "max": 1.0}, {"min": -2.0, "max": 2.0}],
        },
        "covariance_info": {"covariance_type": "square_exponential"},
        "gp_historical_info": {"points_sampled": [
            {"point": [0.1, -1.0], "value": 0.8, "value_var": 0.01},
            {"point": [0.4, 0.5], "value": -0.3, "value_var": 0.01},
            {"point": [0.9, 1.5], "value": 0.2, "value_var": 0.02},
        ]},
        "optimizer_info": {
            "optimizer_type": "gradient_descent",
            "num_multistarts": 40,
            "num_random_samples": 1000,
            "optimizer_parameters": {"max_num_steps": 300},
        },
        "historical_info": {"arms_sampled": {
            "arm1": {"win": 5, "loss": 2, "total": 7},
            "arm2": {"win": 3, "loss": 4, "total": 7},
        }},
    });

    let factory = RequestFactory::new(BuildOptions::default());

    let domain = factory.domain(&request)?;
    println!("Domain {} with bounds:", domain.domain_type());
    for interval in domain.bounding_box() {
        println!("  {}", interval);
    }

    let gp = factory.gaussian_process(&request)?;
    println!(
        "Gaussian process over {} dims with {} sampled points (best so far: {:?})",
        gp.dim(),
        gp.num_sampled(),
        gp.best_so_far()
    );
    println!(
        "  covariance {} hyperparameters {:?}",
        gp.covariance().covariance_type(),
        gp.covariance().hyperparameters()
    );

    let selection = factory.optimizer(&request)?;
    println!(
        "Optimizer {:?}: {} multistarts, {} random samples",
        selection.optimizer,
        selection.parameters.num_multistarts(),
        selection.num_random_samples
    );
    println!("  parameters: {}", serde_json::to_string(&selection.parameters)?);

    let history = factory.bandit_history(&request)?;
    for (name, arm) in history.sample_arms() {
        println!("Arm {}: {} wins, {} losses, {} total", name, arm.win, arm.loss, arm.total);
    }

    // Unknown type names surface as typed errors.
    let bad = json!({"domain_type": "hypersphere"});
    if let Err(e) = build_domain(&bad, false) {
        println!("Rejected request: {}", e);
    }

    Ok(())
}
