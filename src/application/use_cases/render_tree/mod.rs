use crate::application::dto::{TreeRequest, TreeResponse};
use crate::dependency_tree::domain::{Catalogue, Forest};
use crate::dependency_tree::services::{CatalogueIndex, FilterQuery, ForestBuilder, HierarchyFilter};
use crate::ports::outbound::{CatalogueReader, ProgressReporter};
use crate::shared::Result;

/// RenderTreeUseCase - loads a catalogue and produces the filtered forest
///
/// # Type Parameters
/// * `CR` - CatalogueReader implementation
/// * `PR` - ProgressReporter implementation
pub struct RenderTreeUseCase<CR, PR> {
    catalogue_reader: CR,
    progress_reporter: PR,
}

impl<CR, PR> RenderTreeUseCase<CR, PR>
where
    CR: CatalogueReader,
    PR: ProgressReporter,
{
    pub fn new(catalogue_reader: CR, progress_reporter: PR) -> Self {
        Self {
            catalogue_reader,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// Only loading the catalogue can fail; building and filtering the
    /// forest are total.
    pub fn execute(&self, request: TreeRequest) -> Result<TreeResponse> {
        // Step 1: Load the catalogue
        let catalogue = self.load_catalogue(&request)?;

        // Step 2: Index components and build the forest
        let forest = self.build_forest(&catalogue);

        // Step 3: Apply the filter, if any
        let query = request.filter.as_deref().and_then(FilterQuery::parse);
        let filtered = self.apply_filter(&forest, query.as_ref());
        tracing::info!(
            "Tree for {}: {} of {} node(s) shown",
            request.bom_path.display(),
            filtered.node_count(),
            forest.node_count()
        );

        Ok(TreeResponse::new(
            forest,
            filtered,
            query,
            catalogue.total_dependencies(),
        ))
    }

    fn load_catalogue(&self, request: &TreeRequest) -> Result<Catalogue> {
        self.progress_reporter.report(&format!(
            "📖 Loading bill of materials from: {}",
            request.bom_path.display()
        ));

        let catalogue = self.catalogue_reader.read_catalogue(&request.bom_path)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} component(s) and {} dependency entr{}",
            catalogue.components().len(),
            catalogue.dependencies().len(),
            if catalogue.dependencies().len() == 1 { "y" } else { "ies" }
        ));

        Ok(catalogue)
    }

    fn build_forest(&self, catalogue: &Catalogue) -> Forest {
        let index = CatalogueIndex::build(catalogue.components());
        let forest =
            ForestBuilder::build(&index, catalogue.dependencies(), catalogue.components());

        if forest.is_empty() {
            self.progress_reporter
                .report("ℹ️  No dependencies found in the BOM.");
        } else {
            self.progress_reporter.report(&format!(
                "🌳 Built dependency tree: {} root(s), {} node(s)",
                forest.root_count(),
                forest.node_count()
            ));
        }

        forest
    }

    fn apply_filter(&self, forest: &Forest, query: Option<&FilterQuery>) -> Forest {
        let Some(query) = query else {
            return forest.clone();
        };

        let filtered = HierarchyFilter::apply_query(forest, query);
        if filtered.is_empty() && !forest.is_empty() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Filter '{}' did not match any dependency.",
                query.text()
            ));
        } else {
            self.progress_reporter.report(&format!(
                "🔍 Filter '{}': showing {} of {} root(s)",
                query.text(),
                filtered.root_count(),
                forest.root_count()
            ));
        }
        filtered
    }
}
