use bioscope_core::activation::{
    activation_path, labels_path, save_activation, save_labels, write_listing,
};
use bioscope_core::annotate::{balance, load_filters};
use bioscope_core::error::Result;
use bioscope_core::{Annotator, PipelineConfig, TaggedDocument};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

/// Value of `BIOSCOPE_FILTERS` selecting the built-in Java filters.
const BUILTIN_FILTERS: &str = "default";

fn load_annotator(config: &PipelineConfig) -> Result<Option<Annotator>> {
    let Some(source) = &config.filters else {
        return Ok(None);
    };
    let filters = if source.as_os_str() == BUILTIN_FILTERS {
        bioscope_java::default_filters()?
    } else {
        load_filters(source)?
    };
    info!("Loaded {} class filters", filters.len());
    Ok(Some(Annotator::new(filters)))
}

/// Tags one file: listing on stdout, activation file next to the input and,
/// when filters are configured, the labeled dataset.
pub fn execute(path: &Path, config: &PipelineConfig) -> Result<TaggedDocument> {
    // Filter configuration errors are fatal before any token is produced.
    let annotator = load_annotator(config)?;

    let doc = bioscope_java::pipeline(config.decode_policy).run_file(path)?;
    for issue in &doc.issues {
        warn!(
            "Token {} ({}) at {}:{} is not valid UTF-8 after byte {}; text was decoded lossily",
            issue.index,
            issue.kind,
            issue.span.start_line + 1,
            issue.span.start_col + 1,
            issue.valid_up_to
        );
    }

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_listing(&mut out, &doc.tokens)?;
    out.flush()?;

    let activation = activation_path(path);
    let lines = save_activation(&activation, &doc.tokens)?;
    info!("Wrote {} activation records to {}", lines, activation.display());

    if let Some(annotator) = annotator {
        let mut dataset = doc.annotate(&annotator);
        if let Some(seed) = config.balance_seed {
            dataset = balance(&dataset, seed);
        }
        let labels = labels_path(path);
        save_labels(&labels, &dataset)?;
        for (label, count) in dataset.label_counts() {
            info!("  {}: {}", label, count);
        }
        info!("Wrote {} labeled tokens to {}", dataset.len(), labels.display());
    }

    Ok(doc)
}
