use std::cell::RefCell;
use std::fs;
use std::path::Path;

use uhmazing::error::Error;
use uhmazing::forms::{FormItem, FormsApi};
use uhmazing::io::DatasetOptions;
use uhmazing::pipelines::{
    errors, reannotation, report, ErrorDetection, ErrorReport, FormTask, FormsPipeline, Pipeline,
    Reannotation, TokenStats,
};

fn long_span() -> String {
    "a".repeat(60)
}

fn write_dataset(dir: &Path) -> std::path::PathBuf {
    let src = dir.join("uh-mazing.csv");
    let data = format!(
        "ID,EN_disfluent,CS_disfluent,AR_disfluent\n\
         1,I _uh_ think so,já _ehm_ myslím,أنا _آه_ أعتقد\n\
         2,we _um_ go,_{}_ jdeme,نذهب\n\
         3,_like_ yes,ano,_يعني_ نعم\n",
        long_span()
    );
    fs::write(&src, data).unwrap();
    src
}

#[test]
fn detect_single_long_span() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_dataset(dir.path());
    let dst = dir.path().join("results");

    let errors = ErrorDetection::new(src, dst.clone(), DatasetOptions::default())
        .run()
        .unwrap();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].lang, "CS");
    assert_eq!(errors[0].error_type, "Long_Token");
    assert_eq!(errors[0].token_length, 60);
    assert_eq!(errors[0].sample_id, "2");

    assert!(dst.join(errors::ERRORS_FILE).exists());
    let summary = fs::read_to_string(dst.join(errors::SUMMARY_FILE)).unwrap();
    assert!(summary.starts_with("Sample_ID,Language,Error_Type,Triggers,Token_Length,Token_Preview\n"));
    assert!(summary.contains("2,CS,Long_Token,too_long,60,"));
}

#[test]
fn clean_dataset_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("clean.csv");
    fs::write(&src, "ID,EN_disfluent,CS_disfluent\n1,I _uh_ go,_ehm_ jdu\n").unwrap();
    let dst = dir.path().join("results");

    let errors = ErrorDetection::new(src, dst.clone(), DatasetOptions::default())
        .run()
        .unwrap();

    assert!(errors.is_empty());
    assert!(!dst.join(errors::ERRORS_FILE).exists());
}

#[test]
fn missing_language_column() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_dataset(dir.path());
    let options = DatasetOptions {
        langs: Some(vec!["CS".to_string(), "HI".to_string()]),
        ..Default::default()
    };

    let res = ErrorDetection::new(src, dir.path().to_path_buf(), options).run();
    assert!(matches!(res, Err(Error::MissingColumn(c)) if c == "HI_disfluent"));
}

#[test]
fn detect_then_report() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_dataset(dir.path());
    let dst = dir.path().join("results");

    ErrorDetection::new(src.clone(), dst.clone(), DatasetOptions::default())
        .run()
        .unwrap();
    let summary = ErrorReport::new(
        src,
        dst.join(errors::ERRORS_FILE),
        dst.clone(),
        DatasetOptions::default(),
    )
    .run()
    .unwrap();

    let langs: Vec<&str> = summary.iter().map(|s| s.lang.as_str()).collect();
    // AR has no flagged span
    assert_eq!(langs, vec!["CS", "EN"]);
    assert_eq!(summary[0].errors, 1);
    assert_eq!(summary[0].total_tokens, 2);
    assert!((summary[0].error_rate - 50.0).abs() < 1e-9);
    assert_eq!(summary[1].errors, 0);
    assert_eq!(report::mean_error_rate(&summary), Some(25.0));

    let distribution = fs::read_to_string(dst.join(report::DISTRIBUTION_FILE)).unwrap();
    assert!(distribution.starts_with("Language,Bin_Start,Bin_End,Count\n"));
}

#[test]
fn token_tables() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_dataset(dir.path());
    let dst = dir.path().join("results");

    let counts = TokenStats::new(src, dst.clone(), DatasetOptions::default())
        .run()
        .unwrap();

    let langs: Vec<&str> = counts.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(langs, vec!["EN", "CS", "AR"]);
    assert_eq!(counts[0].1.total(), 3);

    let summary = fs::read_to_string(dst.join("disfluencies_summary.csv")).unwrap();
    assert_eq!(
        summary,
        "Language,Total_Tokens,Unique_Types\nAR,2,2\nCS,2,2\nEN,3,3\n"
    );
}

/// Hands out sequential form ids, records items.
#[derive(Default)]
struct FakeForms {
    forms: RefCell<Vec<(String, Vec<FormItem>)>>,
}

impl FormsApi for FakeForms {
    fn create_form(&self, title: &str) -> Result<String, Error> {
        let mut forms = self.forms.borrow_mut();
        forms.push((title.to_string(), vec![]));
        Ok(format!("f{}", forms.len()))
    }

    fn set_description(&self, _form_id: &str, _description: &str) -> Result<(), Error> {
        Ok(())
    }

    fn add_items(&self, _form_id: &str, items: &[FormItem]) -> Result<(), Error> {
        if let Some((_, form_items)) = self.forms.borrow_mut().last_mut() {
            form_items.extend_from_slice(items);
        }
        Ok(())
    }

    fn move_to_folder(&self, _file_id: &str, _folder_id: &str) -> Result<(), Error> {
        Ok(())
    }
}

#[test]
fn reannotate_then_forms() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_dataset(dir.path());
    let dst = dir.path().join("results");

    let targets = Reannotation::new(src, dst.clone(), DatasetOptions::default())
        .run()
        .unwrap();
    // markerless texts: CS of row 3, AR of row 2
    let keys: Vec<_> = targets.iter().map(|t| t.key()).collect();
    assert_eq!(keys, vec![("2", "AR"), ("3", "CS")]);

    let template = dir.path().join("base_reannotation_form.json");
    fs::write(
        &template,
        r#"{"description": {"google": "Annotate [TARGET_LANGUAGE]", "prolific": "[TARGET_LANGUAGE] natives"}}"#,
    )
    .unwrap();
    let links = dir.path().join("reannotation_forms.txt");
    let mapping = dir.path().join("reannotation_form_mapping.csv");

    let p = FormsPipeline::new(
        FormTask::Reannotation { split_above: 30 },
        dst.join(reannotation::TARGETS_FILE),
        template,
        links.clone(),
        mapping.clone(),
        FakeForms::default(),
    );
    let results = p.run().unwrap();

    // task language order: CS before AR
    let uids: Vec<&str> = results.iter().map(|r| r.uid.as_str()).collect();
    assert_eq!(uids, vec!["CS_R1", "AR_R1"]);
    assert_eq!(results[1].prolific_description, "Arabic natives");

    let links = fs::read_to_string(links).unwrap();
    assert_eq!(links.lines().count(), 2);
    assert!(links.starts_with("CS_R1 | CS | f1 | https://docs.google.com/forms/d/f1/viewform"));

    let mapping = fs::read_to_string(mapping).unwrap();
    assert_eq!(mapping.lines().count(), 3);
    assert!(mapping.contains("AR,Arabic,AR_R1,f2,1,1,,2,missing_underscores"));
}
