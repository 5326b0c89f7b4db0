use atelier_core::content::{Catalogue, Tag, Violation, VisualKind};
use speculate2::speculate;

const FIXTURE: &str = r#"{
  "collections": [
    {
      "id": "climate",
      "title": "Climate & Weather Forecasting",
      "headline": "Hybrid pipelines for climate decisions.",
      "description": "Data assimilation and uncertainty quantification.",
      "featuredProject": "fognet",
      "metrics": [["Focus", "Adaptive forecasts"]],
      "workflow": [["Collect", "Ingest feeds"], ["Model", "Run ensembles"]],
      "projects": [
        {
          "id": "downscaling",
          "title": "CMIP Downscaling",
          "summary": "Multimodel ViT downscaling.",
          "tags": ["Internship"],
          "visuals": [
            { "type": "image", "src": "assets/a.gif", "alt": "Downscaling animation" }
          ]
        },
        {
          "id": "fognet",
          "title": "FogNet",
          "summary": "Physics-informed fog forecasting.",
          "tags": [{ "label": "AI2ES", "url": "https://www.ai2es.org" }],
          "visuals": [
            { "type": "video", "src": "assets/b.mp4", "alt": "Clip" }
          ]
        }
      ]
    },
    {
      "id": "tools",
      "title": "ML Tools",
      "headline": "Reusable tooling.",
      "description": "Experiment orchestration.",
      "featuredProject": null,
      "projects": []
    }
  ],
  "certifications": [
    { "image": "assets/cert.png", "alt": "Certificate", "caption": "Deep Learning" }
  ]
}"#;

speculate! {
    before {
        let catalogue = Catalogue::from_json_str(FIXTURE).expect("fixture should parse");
    }

    describe "catalogue" {
        it "preserves declaration order" {
            let ids: Vec<&str> = catalogue.collections().iter().map(|c| c.id.as_str()).collect();
            assert_eq!(ids, vec!["climate", "tools"]);
            assert_eq!(catalogue.first().expect("non-empty").id, "climate");
        }

        it "looks up collections by id and yields None for unknown ids" {
            assert!(catalogue.get("climate").is_some());
            assert!(catalogue.get("does-not-exist").is_none());
            assert_eq!(catalogue.position("tools"), Some(1));
        }

        it "parses dual-shape tags into typed variants" {
            let climate = catalogue.get("climate").expect("climate exists");
            let downscaling = climate.project("downscaling").expect("project exists");
            assert_eq!(downscaling.tags, vec![Tag::Plain("Internship".to_string())]);

            let fognet = climate.project("fognet").expect("project exists");
            assert_eq!(fognet.tags, vec![Tag::Link {
                label: "AI2ES".to_string(),
                url: "https://www.ai2es.org".to_string(),
            }]);
        }

        it "keeps unknown visual kinds out of the usable set" {
            let climate = catalogue.get("climate").expect("climate exists");
            let fognet = climate.project("fognet").expect("project exists");
            assert_eq!(fognet.visuals[0].kind, VisualKind::Other("video".to_string()));
            assert_eq!(fognet.usable_visuals().count(), 0);

            let downscaling = climate.project("downscaling").expect("project exists");
            assert_eq!(downscaling.usable_visuals().count(), 1);
        }
    }

    describe "featured resolution" {
        it "honors a valid featuredProject" {
            let climate = catalogue.get("climate").expect("climate exists");
            assert_eq!(climate.featured_id(), Some("fognet"));
        }

        it "orders the featured project first, remainder in declaration order" {
            let climate = catalogue.get("climate").expect("climate exists");
            let ordered: Vec<&str> = climate.ordered_projects().iter().map(|p| p.id.as_str()).collect();
            assert_eq!(ordered, vec!["fognet", "downscaling"]);
        }

        it "resolves to None for an empty project list" {
            let tools = catalogue.get("tools").expect("tools exists");
            assert_eq!(tools.featured_id(), None);
            assert!(tools.ordered_projects().is_empty());
        }

        it "falls back to the first project when the featured id dangles" {
            let patched = FIXTURE.replace("\"featuredProject\": \"fognet\"", "\"featuredProject\": \"gone\"");
            let catalogue = Catalogue::from_json_str(&patched).expect("parses");
            let climate = catalogue.get("climate").expect("climate exists");
            assert_eq!(climate.featured_id(), Some("downscaling"));
        }
    }

    describe "validate" {
        it "accepts the well-formed fixture" {
            assert!(catalogue.validate().is_empty());
        }

        it "reports dangling featured ids as non-fatal" {
            let patched = FIXTURE.replace("\"featuredProject\": \"fognet\"", "\"featuredProject\": \"gone\"");
            let catalogue = Catalogue::from_json_str(&patched).expect("parses");
            let violations = catalogue.validate();
            assert_eq!(violations.len(), 1);
            assert!(matches!(violations[0], Violation::DanglingFeatured { .. }));
            assert!(!violations[0].is_fatal());
        }

        it "reports duplicate sub-project ids as fatal" {
            let patched = FIXTURE.replace("\"id\": \"downscaling\"", "\"id\": \"fognet\"");
            let catalogue = Catalogue::from_json_str(&patched).expect("parses");
            let violations = catalogue.validate();
            assert!(violations.iter().any(|v| matches!(
                v,
                Violation::DuplicateProjectId { collection, .. } if collection == "climate"
            )));
            assert!(violations.iter().all(|v| v.is_fatal()));
        }
    }
}
