//! Backend resource table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A backend REST resource.
///
/// Every collection the UI talks to is listed here once; default paths
/// can be overridden per deployment through
/// [`ApiConfig`](super::ApiConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    // Core
    /// Login, logout and token issue.
    Auth,
    /// Application users.
    Users,
    // Clients
    /// Client registry (PF and PJ).
    Clients,
    /// Contact people attached to a client.
    ClientContacts,
    // Invoices
    /// Issued invoices.
    Invoices,
    /// Line items of an invoice.
    InvoiceItems,
    // Financial
    /// Ledger entries.
    FinancialTransactions,
    /// Income and expense categories.
    FinancialCategories,
    /// Company bank accounts.
    BankAccounts,
    /// Bills to pay.
    AccountsPayable,
    /// Amounts owed to the company.
    AccountsReceivable,
    /// Cash-flow projections.
    CashFlow,
    // Legal
    /// Lawsuits and administrative proceedings.
    LegalProcesses,
    /// Lawyers assigned to processes.
    Lawyers,
    /// Scheduled hearings.
    Hearings,
    /// Contracts under legal management.
    LegalContracts,
    /// Procedural deadlines.
    LegalDeadlines,
    // Stock
    /// Stock items.
    Products,
    /// Product categories.
    ProductCategories,
    /// Suppliers.
    Suppliers,
    /// Storage locations.
    Warehouses,
    /// Stock entries, exits and transfers.
    StockMovements,
    /// Physical inventory counts.
    StockCounts,
    // Reporting
    /// Aggregated dashboard figures.
    Dashboard,
    /// Accounting reports.
    Accounting,
    /// User notifications.
    Notifications,
}

impl Endpoint {
    /// Every endpoint, in declaration order.
    pub const ALL: [Self; 26] = [
        Self::Auth,
        Self::Users,
        Self::Clients,
        Self::ClientContacts,
        Self::Invoices,
        Self::InvoiceItems,
        Self::FinancialTransactions,
        Self::FinancialCategories,
        Self::BankAccounts,
        Self::AccountsPayable,
        Self::AccountsReceivable,
        Self::CashFlow,
        Self::LegalProcesses,
        Self::Lawyers,
        Self::Hearings,
        Self::LegalContracts,
        Self::LegalDeadlines,
        Self::Products,
        Self::ProductCategories,
        Self::Suppliers,
        Self::Warehouses,
        Self::StockMovements,
        Self::StockCounts,
        Self::Dashboard,
        Self::Accounting,
        Self::Notifications,
    ];

    /// Default path relative to the API base URL, without trailing slash.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Auth => "/auth",
            Self::Users => "/users",
            Self::Clients => "/clients",
            Self::ClientContacts => "/client-contacts",
            Self::Invoices => "/invoices",
            Self::InvoiceItems => "/invoice-items",
            Self::FinancialTransactions => "/financial-transactions",
            Self::FinancialCategories => "/financial-categories",
            Self::BankAccounts => "/bank-accounts",
            Self::AccountsPayable => "/accounts-payable",
            Self::AccountsReceivable => "/accounts-receivable",
            Self::CashFlow => "/cash-flow",
            Self::LegalProcesses => "/legal-processes",
            Self::Lawyers => "/lawyers",
            Self::Hearings => "/hearings",
            Self::LegalContracts => "/legal-contracts",
            Self::LegalDeadlines => "/legal-deadlines",
            Self::Products => "/products",
            Self::ProductCategories => "/product-categories",
            Self::Suppliers => "/suppliers",
            Self::Warehouses => "/warehouses",
            Self::StockMovements => "/stock-movements",
            Self::StockCounts => "/stock-counts",
            Self::Dashboard => "/dashboard",
            Self::Accounting => "/contabil",
            Self::Notifications => "/notifications",
        }
    }

    /// Stable snake_case key used in configuration files.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Users => "users",
            Self::Clients => "clients",
            Self::ClientContacts => "client_contacts",
            Self::Invoices => "invoices",
            Self::InvoiceItems => "invoice_items",
            Self::FinancialTransactions => "financial_transactions",
            Self::FinancialCategories => "financial_categories",
            Self::BankAccounts => "bank_accounts",
            Self::AccountsPayable => "accounts_payable",
            Self::AccountsReceivable => "accounts_receivable",
            Self::CashFlow => "cash_flow",
            Self::LegalProcesses => "legal_processes",
            Self::Lawyers => "lawyers",
            Self::Hearings => "hearings",
            Self::LegalContracts => "legal_contracts",
            Self::LegalDeadlines => "legal_deadlines",
            Self::Products => "products",
            Self::ProductCategories => "product_categories",
            Self::Suppliers => "suppliers",
            Self::Warehouses => "warehouses",
            Self::StockMovements => "stock_movements",
            Self::StockCounts => "stock_counts",
            Self::Dashboard => "dashboard",
            Self::Accounting => "accounting",
            Self::Notifications => "notifications",
        }
    }

    /// Look up an endpoint by its configuration key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.key() == key)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
