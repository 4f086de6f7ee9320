/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs how long it took to evaluate, and outputs the value of
/// the expression.
#[cfg(not(target_arch = "wasm32"))]
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}

/// Re-implementation of the above macro for wasm, where there's no clock to
/// read from. The label is still logged so call sites stay traceable.
#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let value = $ex;
        log::log!($log_level, "{} done", $label);
        value
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_timed_passes_value_through() {
        let value = timed!("Adding", 1 + 2);
        assert_eq!(value, 3);
        let value = timed!("Adding again", log::Level::Trace, 2 + 2);
        assert_eq!(value, 4);
    }
}
