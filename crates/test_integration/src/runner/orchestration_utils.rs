use color_eyre::Result;
use color_eyre::eyre::eyre;
use colored::*;
use futures_util::FutureExt;
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::time::Instant;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

#[macro_export]
macro_rules! run_test {
    ($call:expr) => {
        $crate::runner::orchestration_utils::run_test_impl(stringify!($call), $call)
    };
}

/// Run every listed test against one context, print a summary, and fail if any test failed.
///
/// A test that returns `Err` or panics is recorded as failed and the suite moves on.
#[macro_export]
macro_rules! execute_suite {
    ($context:expr, [ $($test_fn:ident),* $(,)? ]) => {
        {
            let mut failed_tests: Vec<&str> = Vec::new();
            let mut total_tests = 0;
            let suite_start = Instant::now();
            println!();

            $(
                total_tests += 1;
                if run_test!($test_fn($context)).await.is_err() {
                    failed_tests.push(stringify!($test_fn));
                }
            )*

            let passed_tests = total_tests - failed_tests.len();
            println!("{}", "─".repeat(60).truecolor(80, 80, 80));
            println!(
                "{} {}/{} tests passed in {:.2?}.",
                " SUMMARY ".on_purple().black().bold(),
                passed_tests,
                total_tests,
                suite_start.elapsed()
            );
            for name in &failed_tests {
                println!("  {} {}", "✗".red().bold(), name.red());
            }
            println!("{}", "─".repeat(60).truecolor(80, 80, 80));
            println!();

            if !failed_tests.is_empty() {
                color_eyre::eyre::bail!("{} integration test(s) failed", failed_tests.len());
            }
        }
    };
}

/// Run one test with a banner before and a verdict after. A panic (failed `assert!`) is
/// turned into an `Err` so the caller can continue with the next test.
pub async fn run_test_impl<Fut>(raw_name: &str, test: Fut) -> Result<()>
where
    Fut: Future<Output = Result<()>>,
{
    let pretty_name = raw_name.split('(').next().unwrap_or(raw_name).trim();

    println!("{}", "─".repeat(60).truecolor(80, 80, 80));
    println!(
        "{} {}",
        " RUNNING ".on_cyan().black().bold(),
        pretty_name.cyan().bold()
    );

    let start_time = Instant::now();
    let result = match AssertUnwindSafe(test).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => Err(eyre!("test panicked: {}", panic_message(&*payload))),
    };
    let elapsed = start_time.elapsed();

    match &result {
        Ok(()) => println!(
            "{} {} ({:.2?})",
            " PASSED ".on_green().black().bold(),
            pretty_name.green(),
            elapsed
        ),
        Err(e) => {
            println!(
                "{} {} ({:.2?})",
                " FAILED ".on_red().black().bold(),
                pretty_name.red(),
                elapsed
            );
            println!("\n{e:?}");
        }
    }

    result
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

pub fn setup_tracing_and_panic_handling() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "info,sqlx=warn,gallery_api=debug,common_services=debug,hyper=error,reqwest=error".into()
    });

    let subscriber = fmt::Subscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Setting default subscriber failed");

    color_eyre::install().expect("Failed to install color_eyre");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{execute_suite, run_test};
    use std::sync::atomic::{AtomicUsize, Ordering};

    static COUNTED_PASSES: AtomicUsize = AtomicUsize::new(0);

    async fn always_panics(_context: &()) -> Result<()> {
        assert_eq!(1 + 1, 3, "arithmetic is broken");
        Ok(())
    }

    async fn counted_pass(_context: &()) -> Result<()> {
        COUNTED_PASSES.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn suite_with_panic() -> Result<()> {
        execute_suite!(&(), [always_panics, counted_pass]);
        Ok(())
    }

    #[tokio::test]
    async fn panic_becomes_failed_result() {
        let result = run_test_impl("always_panics(&())", always_panics(&())).await;

        let message = format!("{:?}", result.unwrap_err());
        assert!(message.contains("arithmetic is broken"));
    }

    #[tokio::test]
    async fn suite_continues_after_panicking_test() {
        let result = suite_with_panic().await;

        assert!(result.is_err());
        assert_eq!(COUNTED_PASSES.load(Ordering::SeqCst), 1);
    }
}
