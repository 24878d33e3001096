use crate::models::Quote;
use crate::validation::MAX_LINK_LEN;

pub fn render_index(report_date: &str, quote: &Quote, include_comments: bool) -> String {
    INDEX_HTML
        .replace("{{DATE}}", &escape_html(report_date))
        .replace("{{QUOTE_TEXT}}", &escape_html(quote.text))
        .replace("{{QUOTE_AUTHOR}}", &escape_html(quote.author))
        .replace("{{MAX_LINK}}", &MAX_LINK_LEN.to_string())
        .replace(
            "{{COMMENTS_HIDDEN}}",
            if include_comments { "" } else { "hidden" },
        )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Reporte Diario Instagram</title>
  <style>
    :root {
      --bg-1: #faf5ff;
      --bg-2: #fdf2f8;
      --ink: #1f2937;
      --muted: #6b7280;
      --accent: #db2777;
      --accent-2: #2563eb;
      --danger: #dc2626;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 18px 48px rgba(88, 28, 135, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: "Inter", "Segoe UI", sans-serif;
      padding: 24px 16px 48px;
    }

    main {
      width: min(860px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 20px;
    }

    header {
      text-align: center;
    }

    h1 {
      margin: 0 0 6px;
      font-size: clamp(1.6rem, 4vw, 2.2rem);
    }

    .subtitle,
    .hint {
      color: var(--muted);
      margin: 0;
      font-size: 0.9rem;
    }

    .quote {
      font-style: italic;
      margin: 14px auto 0;
      max-width: 640px;
    }

    .card {
      background: var(--card);
      border-radius: 18px;
      box-shadow: var(--shadow);
      padding: 22px;
      display: grid;
      gap: 14px;
    }

    .card h2 {
      margin: 0;
      font-size: 1.15rem;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 14px;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.9rem;
      font-weight: 500;
    }

    input,
    textarea {
      font: inherit;
      padding: 10px 12px;
      border-radius: 10px;
      border: 1px solid #d1d5db;
      width: 100%;
    }

    input.invalid {
      border-color: var(--danger);
    }

    .error {
      color: var(--danger);
      font-size: 0.8rem;
      min-height: 1em;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button.ghost {
      background: transparent;
      color: var(--accent-2);
      padding: 4px 10px;
    }

    button.ghost.delete {
      color: var(--danger);
    }

    .account {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 10px;
      padding: 10px 12px;
      border: 1px solid #e5e7eb;
      border-radius: 12px;
      cursor: pointer;
    }

    .account.active {
      border-color: var(--accent-2);
      background: #eff6ff;
    }

    .account .link {
      color: var(--muted);
      font-size: 0.8rem;
      overflow: hidden;
      text-overflow: ellipsis;
      white-space: nowrap;
    }

    .result {
      font-size: 1.6rem;
      font-weight: 700;
      color: var(--accent-2);
    }

    pre {
      white-space: pre-wrap;
      background: #f9fafb;
      border-radius: 12px;
      padding: 16px;
      margin: 0;
      font-size: 0.9rem;
    }

    [hidden] {
      display: none !important;
    }
  </style>
</head>
<body>
  <main>
    <header>
      <h1>Reporte Diario Instagram</h1>
      <p class="subtitle">Calcula automáticamente las métricas de rendimiento de tu cuenta</p>
      <p class="quote">"{{QUOTE_TEXT}}" <span class="hint">— {{QUOTE_AUTHOR}}</span></p>
    </header>

    <section class="card">
      <h2>Fecha del Reporte</h2>
      <p class="hint">Se calcula automáticamente como el día anterior, pero puedes editarla si es necesario</p>
      <label>Fecha del Reporte (DD/MM/YY)
        <input id="reportDate" placeholder="DD/MM/YY" value="{{DATE}}" />
      </label>
    </section>

    <section class="card">
      <h2>Cuentas de Instagram</h2>
      <div id="accountList" class="grid"></div>
      <button id="showForm" type="button">Añadir Nueva Cuenta</button>
      <form id="accountForm" hidden>
        <h3 id="formTitle">Añadir Nueva Cuenta</h3>
        <div class="grid">
          <label>Usuario de Instagram
            <input id="handler" placeholder="@tu_usuario" />
          </label>
          <label>Enlace de la Cuenta
            <input id="link" placeholder="https://www.instagram.com/tu_usuario" />
            <span id="linkError" class="error"></span>
            <span id="linkCount" class="hint">0/{{MAX_LINK}} caracteres</span>
          </label>
        </div>
        <button type="submit">Guardar Cuenta</button>
        <button id="cancelForm" type="button" class="ghost">Cancelar</button>
      </form>
    </section>

    <section class="card">
      <h2>Métricas Diarias</h2>
      <div class="grid">
        <label>Videos subidos 24 h <input class="metric" data-field="videosUploaded" inputmode="numeric" /></label>
        <label>Videos editados listos total <input class="metric" data-field="videosReady" inputmode="numeric" /></label>
        <label>Ideas listas para editar total <input class="metric" data-field="ideasReady" inputmode="numeric" /></label>
        <label>Visitas 24 h <input class="metric" data-field="visits" inputmode="numeric" /></label>
        <label>Clicks perfil 24 h <input class="metric" data-field="profileClicks" inputmode="numeric" /></label>
        <label>Clicks enlace 24 h <input class="metric" data-field="linkClicks" inputmode="numeric" /></label>
      </div>
    </section>

    <section class="card">
      <h2>Cálculos Automáticos</h2>
      <div class="grid">
        <div>
          <p class="hint">Conversión de Visitas a visitas al perfil</p>
          <span id="visitToProfile" class="result">0.00%</span>
        </div>
        <div>
          <p class="hint">Conversión de Clicks Perfil a toques en enlace externo</p>
          <span id="profileToLink" class="result">0.00%</span>
        </div>
      </div>
    </section>

    <section class="card" {{COMMENTS_HIDDEN}}>
      <h2>Comentarios</h2>
      <label>Bien <textarea class="comment" data-field="bien" rows="2"></textarea></label>
      <label>A mejorar <textarea class="comment" data-field="mejorar" rows="2"></textarea></label>
      <label>Bloqueos / peticiones <textarea class="comment" data-field="bloqueos" rows="2"></textarea></label>
    </section>

    <section class="card">
      <h2>Reporte</h2>
      <pre id="report"></pre>
      <button id="copyReport" type="button">Copiar Reporte</button>
    </section>
  </main>

  <script>
    const state = { accounts: [], activeId: null, editingId: null };
    const $ = (id) => document.getElementById(id);

    async function request(method, url, body) {
      const options = { method, headers: {} };
      if (body !== undefined) {
        options.headers['Content-Type'] = 'application/json';
        options.body = JSON.stringify(body);
      }
      const res = await fetch(url, options);
      if (!res.ok) {
        throw new Error(await res.text());
      }
      return res;
    }

    function formatPercent(value) {
      return `${Number(value).toFixed(2)}%`;
    }

    async function refreshReport() {
      const res = await request('GET', '/api/report');
      $('report').textContent = await res.text();
    }

    function renderSession(view) {
      $('visitToProfile').textContent = formatPercent(view.calculations.visitToProfileConversion);
      $('profileToLink').textContent = formatPercent(view.calculations.profileToLinkConversion);
    }

    function renderAccounts() {
      const list = $('accountList');
      list.innerHTML = '';
      for (const account of state.accounts) {
        const row = document.createElement('div');
        row.className = 'account' + (account.id === state.activeId ? ' active' : '');

        const info = document.createElement('div');
        const name = document.createElement('strong');
        name.textContent = `@${account.handler}`;
        const link = document.createElement('div');
        link.className = 'link';
        link.textContent = account.link;
        link.title = account.link;
        info.append(name, link);

        const edit = document.createElement('button');
        edit.type = 'button';
        edit.className = 'ghost';
        edit.textContent = 'Editar';
        edit.addEventListener('click', (event) => {
          event.stopPropagation();
          openForm(account);
        });

        const remove = document.createElement('button');
        remove.type = 'button';
        remove.className = 'ghost delete';
        remove.textContent = 'Eliminar';
        remove.addEventListener('click', (event) => {
          event.stopPropagation();
          deleteAccount(account.id);
        });

        const actions = document.createElement('div');
        actions.append(edit, remove);
        row.append(info, actions);
        row.addEventListener('click', () => selectAccount(account.id));
        list.append(row);
      }
      $('showForm').hidden = !$('accountForm').hidden;
    }

    async function loadAccounts() {
      const res = await request('GET', '/api/accounts');
      const data = await res.json();
      state.accounts = data.accounts;
      state.activeId = data.activeId;
      renderAccounts();
      if (state.accounts.length === 0) {
        openForm(null);
      }
    }

    function openForm(account) {
      state.editingId = account ? account.id : null;
      $('formTitle').textContent = account ? 'Editar Cuenta' : 'Añadir Nueva Cuenta';
      $('handler').value = account ? account.handler : '';
      $('link').value = account ? account.link : '';
      $('accountForm').hidden = false;
      updateLinkFeedback();
      renderAccounts();
    }

    function closeForm() {
      state.editingId = null;
      $('accountForm').hidden = true;
      $('linkError').textContent = '';
      $('link').classList.remove('invalid');
      renderAccounts();
    }

    async function updateLinkFeedback() {
      const link = $('link').value;
      $('linkCount').textContent = `${[...link].length}/{{MAX_LINK}} caracteres`;
      const res = await request('POST', '/api/validate-link', { link });
      const result = await res.json();
      $('linkError').textContent = result.message;
      $('link').classList.toggle('invalid', !result.valid);
    }

    async function saveAccount(event) {
      event.preventDefault();
      const body = { handler: $('handler').value, link: $('link').value };
      const editing = state.editingId;
      try {
        if (editing) {
          await request('PUT', `/api/accounts/${encodeURIComponent(editing)}`, body);
          alert('Cuenta actualizada exitosamente');
        } else {
          await request('POST', '/api/accounts', body);
          alert('Cuenta añadida exitosamente');
        }
        closeForm();
      } catch (err) {
        alert(err.message);
      }
      await loadAccounts();
      await refreshReport();
    }

    async function selectAccount(id) {
      try {
        await request('POST', `/api/accounts/${encodeURIComponent(id)}/select`);
      } catch (err) {
        alert(err.message);
      }
      await loadAccounts();
      await refreshReport();
    }

    async function deleteAccount(id) {
      try {
        await request('DELETE', `/api/accounts/${encodeURIComponent(id)}`);
        alert('Cuenta eliminada exitosamente');
      } catch (err) {
        alert(err.message);
      }
      await loadAccounts();
      await refreshReport();
    }

    function collect(selector) {
      const values = {};
      document.querySelectorAll(selector).forEach((el) => {
        values[el.dataset.field] = el.value;
      });
      return values;
    }

    async function pushSession(update) {
      const res = await request('PUT', '/api/session', update);
      renderSession(await res.json());
      await refreshReport();
    }

    async function loadSession() {
      const res = await request('GET', '/api/session');
      const view = await res.json();
      $('reportDate').value = view.reportDate;
      document.querySelectorAll('.metric').forEach((el) => {
        el.value = view.metrics[el.dataset.field] || '';
      });
      document.querySelectorAll('.comment').forEach((el) => {
        el.value = view.comments[el.dataset.field] || '';
      });
      renderSession(view);
    }

    async function copyReport() {
      try {
        const res = await request('GET', '/api/report');
        await navigator.clipboard.writeText(await res.text());
        alert('Reporte copiado al portapapeles');
      } catch (err) {
        console.error('Error al copiar:', err);
        alert('Error al copiar el reporte');
      }
    }

    $('reportDate').addEventListener('input', (e) => pushSession({ reportDate: e.target.value }));
    document.querySelectorAll('.metric').forEach((el) => {
      el.addEventListener('input', () => pushSession({ metrics: collect('.metric') }));
    });
    document.querySelectorAll('.comment').forEach((el) => {
      el.addEventListener('input', () => pushSession({ comments: collect('.comment') }));
    });
    $('link').addEventListener('input', updateLinkFeedback);
    $('accountForm').addEventListener('submit', saveAccount);
    $('cancelForm').addEventListener('click', closeForm);
    $('showForm').addEventListener('click', () => openForm(null));
    $('copyReport').addEventListener('click', copyReport);

    (async () => {
      await loadAccounts();
      await loadSession();
      await refreshReport();
    })();
  </script>
</body>
</html>
"#;
